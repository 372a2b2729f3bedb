pub mod application {
    pub mod catalog {
        pub mod search_debouncer;
        pub mod store;
    }
    pub mod product {
        pub mod create;
        pub mod delete;
        pub mod load_all;
        pub mod update;
    }
}

pub mod domain {
    pub mod errors;
    pub mod logger;
    pub mod catalog {
        pub mod state;
        pub mod view;
    }
    pub mod product {
        pub mod errors;
        pub mod gateway;
        pub mod model;
        pub mod value_objects;
        pub mod use_cases {
            pub mod create;
            pub mod delete;
            pub mod load_all;
            pub mod update;
        }
    }
}
