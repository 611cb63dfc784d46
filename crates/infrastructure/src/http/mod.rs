pub mod fetcher;

pub use fetcher::HttpFetcher;
