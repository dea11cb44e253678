pub mod registry;
pub mod search;
pub mod state;
pub mod widget;

#[cfg(test)]
mod test;

pub use registry::OpenRegistry;
pub use search::{substring_filter, SearchOutcome, SearchProvider};
pub use state::{Choice, DropdownState, PanelState};
pub use widget::{
    Dropdown, DropdownResponse, LabelRow, LabelValue, OptionRenderer, ValueRenderer,
};
