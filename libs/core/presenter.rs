use crate::{entities::list::TodoList, progress::Progress};

/// Snapshot handed to the presenter after startup and every mutation.
#[derive(Clone, Copy, Debug)]
pub enum View<'a> {
    /// Overview of every list
    Lists {
        lists: &'a [TodoList],
        overall: Progress,
    },
    /// A single opened list
    List {
        list: &'a TodoList,
        progress: Progress,
    },
}

pub trait Presenter {
    fn render(&mut self, view: View<'_>);

    /// The opened list is gone, go back to the overview
    fn navigate_to_lists(&mut self) {}
}

/// Presenter that ignores everything
#[derive(Debug, Default)]
pub struct NoopPresenter;

impl Presenter for NoopPresenter {
    fn render(&mut self, _view: View<'_>) {}
}
