//! Generic enquiry list: filter criteria, paginated fetch, row-level flags,
//! checkbox selection and the submit/execute dispatcher shared by every
//! enquiry and action page.

pub mod action;
pub mod column;
pub mod filter;
pub mod page;
pub mod row;
pub mod selection;

pub use action::{ActionError, Payload, Requirement};
pub use column::{ColumnDef, ColumnKind};
pub use filter::{FilterCriteria, FilterField, FilterKind, SelectOption, AVAILABILITY_OPTIONS};
pub use page::{EnquiryPage, EnquiryRequest, EnquiryResponse, PaginationState};
pub use row::{EnquiryRow, YesNo};
pub use selection::{Selection, SelectionMode};
