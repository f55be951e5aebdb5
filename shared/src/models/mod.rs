//! Domain entity models
//!
//! Client-side copies of the backend entities. The backend owns all of these;
//! the SDK only holds transient, revalidated copies fetched per view.

mod issue;
mod location;
mod pickup_person;
mod principal;
mod request;
mod user;

pub use issue::{IssueCreate, IssueMessage, IssueReply, IssueStatus, SupportIssue};
pub use location::{Coordinates, PickupLocation};
pub use pickup_person::{PickupPerson, PickupPersonCreate, PickupPersonUpdate};
pub use principal::{Principal, Role};
pub use request::{Request, RequestCreate, ScheduleRequest, MAX_REQUEST_PHOTOS};
pub use user::{User, UserUpdate};
