use anyhow::Result;

pub trait Query<T> {
    type Filter;
    fn query(&self, filter: &Self::Filter) -> Result<Vec<T>>;
}

pub trait Retrieve<T> {
    type Key;
    fn retrieve(&self, key: &Self::Key) -> Result<T>;
}
