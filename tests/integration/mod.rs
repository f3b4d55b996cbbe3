/// Integration tests: the tracker wired to real storage and a remote service
mod basic_integration;
mod http_integration;
