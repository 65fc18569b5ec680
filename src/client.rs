pub mod books_client;
