pub mod rotation_distr;
pub mod spiral_sampler;
pub mod uniform_rect_sampler;
