mod project;
mod segment;
mod settings;
mod stopwords;
