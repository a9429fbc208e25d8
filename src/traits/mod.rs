pub mod dual_vec_ops;
pub mod num_traits_impls;
pub mod std_ops;
