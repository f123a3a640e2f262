pub mod support;

mod http_client_flow;
