mod feed_client;

pub use feed_client::SwimDataClient;
