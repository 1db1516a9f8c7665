pub mod ray;

pub use glam::{DMat3, DMat4, DQuat, DVec3};
pub use ray::Ray;

pub type Point3 = DVec3;
pub type Vector3 = DVec3;
