pub mod utf8_offsets;
