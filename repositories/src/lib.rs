pub mod items;
pub mod objects;

#[cfg(test)]
pub(crate) mod test_tools;
