pub mod api {
    pub const TITLE: &str = "Challenge API";
    pub const VERSION: &str = "1.0.0";
}

pub mod hello {
    pub const NAME_PARAM: &str = "name";
    pub const DEFAULT_NAME: &str = "world";
    pub const NAME_MIN_LENGTH: usize = 1;
    pub const NAME_MAX_LENGTH: usize = 50;
}

pub mod location {
    pub const QUERY: &str = "query";
}
