mod sos_dto;

pub use sos_dto::{SosRequestDto, SosResponseDto};
