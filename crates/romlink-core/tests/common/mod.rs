pub mod rom_tree;
