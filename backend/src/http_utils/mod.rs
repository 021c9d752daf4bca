pub mod rest_client;
