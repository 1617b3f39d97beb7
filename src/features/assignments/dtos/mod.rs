mod assignment_dto;

pub use assignment_dto::{AssignUserDto, AssignedUserDto};
