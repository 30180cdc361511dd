#![doc = include_str!(concat!("../", env!("CARGO_PKG_README")))]

#[doc(inline)]
pub use handpose_tensor as tensor;

#[doc(inline)]
pub use handpose_tensor_ops as tensor_ops;

#[doc(inline)]
pub use handpose_rotation as rotation;

#[doc(inline)]
pub use handpose_loss as loss;

#[doc(inline)]
pub use handpose_mano as mano;
