pub mod error;
pub mod form_session;
pub mod intent;
pub mod options;
pub mod pager;
pub mod seed;
pub mod session;
pub mod store;
pub mod view;

pub use error::{CoreError, Result};
pub use form_session::{FormMode, FormSession, SubmitBlock, SubmitOutcome};
pub use intent::{Ignored, Intent, Outcome};
pub use options::{DEFAULT_ITEMS_PER_PAGE, SessionOptions};
pub use pager::{PageNav, clamp_page, page_bounds, total_pages};
pub use seed::{load_seed, seed_records};
pub use session::Session;
pub use store::RecordStore;
pub use view::{Summary, TableView, ViewState, filter_records, paginate, sort_records, summarize};
