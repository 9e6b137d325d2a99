pub mod evaluate_dto;
