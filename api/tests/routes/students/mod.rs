mod patch_test;
mod post_test;
