//! Demo - A Full Page Built from the Components

mod page;

pub use page::DemoPage;
