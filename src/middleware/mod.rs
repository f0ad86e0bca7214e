pub mod json_body;
pub mod path_id;

pub use json_body::{JsonBody, MAX_BODY_BYTES};
pub use path_id::{TODOS_SEGMENT, TodoId, parse_id};
