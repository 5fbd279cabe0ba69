pub mod attentions;
