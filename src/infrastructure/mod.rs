pub mod factory;
pub mod http_client_factory;
pub mod market;
pub mod mock;
pub mod news;
pub mod openai;

pub use factory::ServiceFactory;
