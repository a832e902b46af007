mod s3_stage;

pub use s3_stage::S3ObjectStage;
