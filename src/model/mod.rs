//! Wire-level data transfer objects shared by the HTTP API.
//!
//! DTOs define the JSON shapes accepted and returned by the controllers. They carry no
//! behavior beyond serialization and OpenAPI schema generation; conversion to and from
//! server domain models happens in `server::model`.

pub mod answer;
pub mod api;
pub mod question;
