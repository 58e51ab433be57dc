pub mod tokeninfo;
