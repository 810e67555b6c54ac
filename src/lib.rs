pub mod shared {
    pub mod core {
        pub mod key_predicate;
        pub mod primitives;
    }
    pub mod infrastructure {
        pub mod odata;
    }
}

pub mod modules {
    pub mod entities {
        pub mod core {
            pub mod catalog;
            pub mod entity_set;
            pub mod key;
            pub mod ports;
            pub mod query;
            pub mod record;
        }
        pub mod use_cases {
            pub mod list_entities {
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod get_entity {
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod count_entities {
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod create_entity {
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod update_entity {
                pub mod inbound {
                    pub mod http;
                }
            }
        }
        pub mod adapters {
            pub mod inbound {
                pub mod http;
            }
            pub mod outbound {
                pub mod in_memory_repository;
            }
        }
    }
    pub mod service {
        pub mod use_cases {
            pub mod describe_service {
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod health_check {
                pub mod inbound {
                    pub mod http;
                }
            }
        }
    }
}

pub mod shell;
