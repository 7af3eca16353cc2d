//! Book catalogue service.
//!
//! A flat collection of book records persisted as one JSON document, exposed
//! over HTTP with CRUD, pagination and a parallel keyword search.

pub mod config;

pub mod domain {
    pub mod error;
    pub mod repository;

    pub mod model {
        pub mod book;
        pub mod page;
    }
}

pub mod application {
    pub mod error;
    pub mod search;
    pub mod service;
    pub mod store;
}

pub mod infra {
    pub mod json_store;
}

pub mod interface {
    pub mod http {
        pub mod error;
        pub mod handlers;
        pub mod server;
    }
}
