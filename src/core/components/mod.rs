mod dialog;
mod table;

pub use dialog::{BaseDialog, DialogWidth};
pub use table::{
    BadgeVariant, SortDirection, SortableHeader, TableActionButton, TableActions, TableBadge,
};
