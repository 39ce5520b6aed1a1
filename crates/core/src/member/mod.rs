mod error;
mod http_mapping;
mod queries;
mod requests;
mod responses;
mod service;
mod types;

pub use error::{MemberAction, MemberError};
pub use http_mapping::member_error_to_status_code;
pub use queries::{
    delete_member, get_member, id_param, insert_member, list_members, update_member,
    DELETE_MEMBER, INSERT_MEMBER, SELECT_ALL_MEMBERS, SELECT_MEMBER_BY_ID, UPDATABLE_COLUMNS,
};
pub use requests::{CreateMemberRequest, UpdateMemberRequest};
pub use responses::{
    ErrorResponse, MemberCreatedResponse, MemberListResponse, MemberResponse, MessageResponse,
    MEMBER_CREATED, MEMBER_DELETED, MEMBER_UPDATED,
};
pub use service::MemberService;
pub use types::{format_date, parse_date, Member, MemberChanges, NewMember, DATE_FORMAT};
