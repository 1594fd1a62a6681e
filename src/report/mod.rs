// Terminal rendering of a dashboard snapshot
mod text;

pub use text::render;
