mod batch;
mod conversions;
