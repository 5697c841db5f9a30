pub mod m202510180001_create_documents;
