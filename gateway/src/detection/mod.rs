pub mod fallback;
pub mod normalizer;
pub mod proxy;

#[cfg(test)]
pub mod test_backend;
