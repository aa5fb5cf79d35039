pub mod request_id;

pub use request_id::{request_id_middleware, make_span_with_request_id, RequestId, REQUEST_ID_HEADER};
