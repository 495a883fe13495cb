//! Builder behavior driven from markdown source.

mod blocks;
mod inlines;
mod lists;
mod tables;
