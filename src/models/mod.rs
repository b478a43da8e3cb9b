pub mod department;
