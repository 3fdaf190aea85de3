pub(crate) mod blogs;
