pub(crate) mod autocomplete;
