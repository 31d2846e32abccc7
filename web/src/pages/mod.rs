pub mod need_license;
