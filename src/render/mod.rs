pub(crate) mod canvas;
pub(crate) mod figure;
pub(crate) mod text;
