mod config;
mod request_flow;
