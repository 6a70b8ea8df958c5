mod load_txt_records;

pub use load_txt_records::LoadTxtRecordsUseCase;
