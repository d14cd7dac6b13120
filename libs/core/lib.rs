mod app;
mod clock;
mod confirmation;
mod error;
mod ids;
mod load;
mod persistence;
mod presenter;
mod progress;
mod reset;

pub mod entities;

pub use app::App;
pub use clock::{Clock, ManualClock, SystemClock};
pub use confirmation::{ConfirmationRequest, ConfirmationToken, Confirmations, PendingAction};
pub use entities::{
    list::{ListId, TodoList},
    store::Store,
    todo::{Todo, TodoId},
};
pub use error::ValidationError;
pub use ids::IdGenerator;
pub use load::{load, Core};
pub use persistence::{Persistence, ResetOutcome, DATA_KEY, LAST_RESET_KEY};
pub use presenter::{NoopPresenter, Presenter, View};
pub use progress::{list_progress, overall_progress, partition_by_completion, Progress};
pub use reset::{ResetDecision, ResetScheduler};
