mod page_flow;
mod persistence;
