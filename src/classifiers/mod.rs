pub mod split_criteria;
