pub mod application {
    pub mod item {
        pub mod create;
        pub mod delete;
        pub mod find_all;
        pub mod find_by_id;
        pub mod update;
    }
    pub mod user {
        pub mod find_all;
        pub mod find_by_id;
    }
}

pub mod domain {
    pub mod errors;
    pub mod logger;
    pub mod response;
    pub mod item {
        pub mod model;
        pub mod repository;
        pub mod use_cases {
            pub mod create;
            pub mod delete;
            pub mod find_all;
            pub mod find_by_id;
            pub mod update;
        }
    }
    pub mod user {
        pub mod model;
        pub mod repository;
        pub mod use_cases {
            pub mod find_all;
            pub mod find_by_id;
        }
    }
}
