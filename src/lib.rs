pub mod cli {
    pub mod parser;
}
pub mod config;
pub mod fixit;
pub mod linear {
    pub mod client;
    #[cfg(test)]
    pub(crate) mod fake;
    pub mod graphql;
    pub mod queries;
    pub mod types;
}
pub mod normalize;
pub mod output;
pub mod report;
pub mod rice;
pub mod run;
pub mod token;
pub mod writer;
