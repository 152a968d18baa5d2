pub mod accordion;
pub mod alert;
pub mod breadcrumb;
pub mod card;
pub mod dropdown;
pub mod pagination;
pub mod table;

pub use accordion::{Accordion, AccordionContent, AccordionItem, AccordionTrigger};
pub use alert::{Alert, AlertDescription, AlertTitle};
pub use breadcrumb::{
    Breadcrumb, BreadcrumbEllipsis, BreadcrumbItem, BreadcrumbLink, BreadcrumbList,
    BreadcrumbPage, BreadcrumbSeparator,
};
pub use card::{Card, CardContent, CardDescription, CardFooter, CardHeader, CardTitle};
pub use dropdown::{
    DropdownMenu, DropdownMenuCheckboxItem, DropdownMenuContent, DropdownMenuGroup,
    DropdownMenuItem, DropdownMenuLabel, DropdownMenuRadioGroup, DropdownMenuRadioItem,
    DropdownMenuSeparator, DropdownMenuShortcut, DropdownMenuTrigger, MenuAlign,
};
pub use pagination::{
    Pagination, PaginationBar, PaginationContent, PaginationEllipsis, PaginationItem,
    PaginationLink, PaginationNext, PaginationPrevious,
};
pub use table::{
    Table, TableBody, TableCaption, TableCell, TableFooter, TableHead, TableHeader, TableRow,
};
