//! Up/down movement, interpreted by the view on top: the list cursor on the
//! list page, the focused field in the amenity form

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavigationAction {
    Next,
    Previous,
}
