mod constants;
mod fields;
mod header;
mod integers;
