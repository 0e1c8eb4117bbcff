// Input adapters — gene lists from text files and multi-sample workbooks.

pub mod gene_list;
pub mod workbook;
