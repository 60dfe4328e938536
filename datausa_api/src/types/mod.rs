mod dataset;
pub use self::dataset::{Dataset, NationDataset, StateDataset};

mod record;
pub use self::record::PopulationRecord;

mod state;
pub use self::state::{StateID, StateRecord};

mod nation;
pub use self::nation::{NationID, NationRecord};
